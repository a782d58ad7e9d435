use crate::asm::{units, InjectionDocument, Quantity, SampleDocument, NOT_APPLICABLE};
use crate::backend::Injection;

/// Map the injected sample; the injection name identifies it
pub fn map_sample(injection: &Injection) -> SampleDocument {
    SampleDocument {
        sample_identifier: injection.name.clone(),
        written_name: injection.name.clone(),
        batch_identifier: NOT_APPLICABLE.to_string(),
        description: injection
            .comment
            .clone()
            .filter(|c| !c.trim().is_empty()),
    }
}

/// Map the injection settings
pub fn map_injection(injection: &Injection) -> InjectionDocument {
    InjectionDocument {
        injection_identifier: injection.name.clone(),
        injection_time: injection.inject_time,
        injection_volume_setting: injection
            .injection_volume_ul
            .map(|v| Quantity::new(v, units::MICROLITERS)),
    }
}
