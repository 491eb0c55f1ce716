//! Field table consistency and naming properties.

use erasmus_client::models::{
    AttendeeField, CustomFormField, EventField, OrderField, PartnerOrganizationField,
    TicketField, UserField,
};
use erasmus_client::wire::{kebab_to_snake, snake_to_kebab, WireField};
use erasmus_testing::properties::snake_identifier;
use proptest::prelude::*;
use std::collections::HashSet;

fn check_table<F: WireField>() {
    let mut seen = HashSet::new();
    for field in F::ALL {
        assert_eq!(
            field.wire_key(),
            snake_to_kebab(field.field_name()),
            "{field:?} wire key does not follow the naming rule"
        );
        assert!(seen.insert(field.wire_key()), "{field:?} wire key is duplicated");
        assert_eq!(F::from_wire(field.wire_key()), Some(*field));
    }
}

#[test]
fn test_every_table_follows_kebab_rule() {
    check_table::<EventField>();
    check_table::<PartnerOrganizationField>();
    check_table::<AttendeeField>();
    check_table::<TicketField>();
    check_table::<OrderField>();
    check_table::<UserField>();
    check_table::<CustomFormField>();
}

proptest! {
    #[test]
    fn test_kebab_roundtrip(name in snake_identifier()) {
        prop_assert_eq!(kebab_to_snake(&snake_to_kebab(&name)), name);
    }

    #[test]
    fn test_kebab_has_no_underscores(name in snake_identifier()) {
        prop_assert!(!snake_to_kebab(&name).contains('_'));
    }
}
