//! Domain model exchanged with the backend.
//!
//! Each submodule holds a resource struct, its wire field table, and the
//! create/patch inputs that render outbound attributes.

pub mod attendee;
pub mod custom_form;
pub mod event;
pub mod order;
pub mod partner_organization;
pub mod ticket;
pub mod user;

pub use attendee::{ApplicationStatus, Attendee, AttendeeDraft, AttendeeField, AttendeePatch};
pub use custom_form::{CustomForm, CustomFormField};
pub use event::{Event, EventCreate, EventField, EventPatch};
pub use order::{Order, OrderField};
pub use partner_organization::{
    PartnerOrganization, PartnerOrganizationCreate, PartnerOrganizationField,
    PartnerOrganizationPatch,
};
pub use ticket::{Ticket, TicketDraft, TicketField};
pub use user::{AuthResponse, User, UserField, UserPatch, UserRegistration};
