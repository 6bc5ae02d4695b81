mod model {
    pub mod error;
    pub mod form;
    pub mod schema;
}
mod catalog {
    pub mod cache;
    pub mod pagination;
    pub mod search;
    pub mod view;
}
mod editor {
    pub mod authoring;
    pub mod profile;
}
mod constants;
mod outbox;
mod session;

pub use authoring::*;
pub use catalog::*;
pub use constants::*;
pub use editor::*;
pub use model::*;
pub use outbox::*;
pub use profile::*;
pub use search::filter_recipes;
pub use session::*;
pub use view::*;
