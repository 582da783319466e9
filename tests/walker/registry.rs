use chainspect::inspector::Session;
use chainspect::plugin::walk::{WalkPlugin, WALK_PLUGIN};
use chainspect::plugin::{ConsolePlugin, PluginRegistry, RegistryError};
use chainspect::ui::console::print::ExternalPrinter;
use std::rc::Rc;

struct NopPlugin {}

impl ConsolePlugin for NopPlugin {
    fn name(&self) -> &'static str {
        "nop"
    }

    fn invoke(&self, _: &dyn Session, printer: &ExternalPrinter, _: Option<&str>) {
        printer.println("nop");
    }

    fn help(&self) -> &str {
        "Nop plugin, for test purposes only"
    }
}

#[test]
fn test_registration() {
    let mut registry = PluginRegistry::default();
    registry.register(Rc::new(WalkPlugin::new())).unwrap();
    registry.register(Rc::new(NopPlugin {})).unwrap();

    assert!(registry.get(WALK_PLUGIN).is_some());
    assert!(registry.get("nop").is_some());
    assert!(registry.get("unseen").is_none());

    assert_eq!(
        registry.names().collect::<Vec<_>>(),
        vec![WALK_PLUGIN, "nop"]
    );
}

#[test]
fn test_double_registration_is_an_error() {
    let mut registry = PluginRegistry::default();
    registry.register(Rc::new(WalkPlugin::new())).unwrap();

    let err = registry.register(Rc::new(WalkPlugin::new())).unwrap_err();
    assert!(matches!(err, RegistryError::AlreadyRegistered(WALK_PLUGIN)));
}
