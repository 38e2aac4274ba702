pub mod contact;
pub mod project;
pub mod qualification;
pub mod user;

pub use contact::Contact;
pub use project::Project;
pub use qualification::Qualification;
pub use user::User;
