mod artist;
mod layout;
mod visitor;

pub use artist::ArtistPage;
pub use layout::ExhibitLayout;
pub use visitor::Visitor;
