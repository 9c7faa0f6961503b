use fxhash::FxHashMap;

use super::converter::EventConverter;
use super::error::RegistryError;

/// A constructor for one converter type.
pub type ConverterFactory = fn() -> Box<dyn EventConverter>;

/*
    The registry maps event-type tags to converter factories. Nothing
    registers itself behind the scenes: the owning process adds every
    converter it wants at startup and the registry stays plain data that
    can be inspected and torn down like anything else.
 */
#[derive(Debug, Default)]
pub struct ConverterRegistry {
    factories: FxHashMap<String, ConverterFactory>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        ConverterRegistry {
            factories: FxHashMap::default(),
        }
    }

    /// Register a factory for an event type, replacing any previous one.
    pub fn register(&mut self, event_type: &str, factory: ConverterFactory) {
        self.factories.insert(event_type.to_string(), factory);
    }

    /// Construct the converter registered for an event type.
    pub fn create(&self, event_type: &str) -> Result<Box<dyn EventConverter>, RegistryError> {
        match self.factories.get(event_type) {
            Some(factory) => Ok(factory()),
            None => Err(RegistryError::UnknownEventType(event_type.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EVENT_TYPE;
    use crate::converter::HexaBoardConverter;

    #[test]
    fn registered_types_dispatch_to_their_converter() {
        let mut registry = ConverterRegistry::new();
        registry.register(EVENT_TYPE, || Box::new(HexaBoardConverter::new()));

        let converter = registry.create(EVENT_TYPE).unwrap();
        assert_eq!(converter.event_type(), EVENT_TYPE);
    }

    #[test]
    fn unknown_types_are_an_error() {
        let registry = ConverterRegistry::new();
        assert!(registry.create("Telescope").is_err());
    }
}
