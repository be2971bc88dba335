pub mod content;
pub mod submission;

pub use content::{
    Article, Brand, NavLink, Office, OfficeAddress, Program, Service, SiteMeta, Stat, Testimonial,
    Workshop,
};
pub use submission::{ContactFields, ContactSubmission};
