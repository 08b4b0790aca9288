// Interface adapters: wire protocol and the serialized roster feed.

pub mod feed;
pub mod protocol;

pub use feed::spawn_roster_serializer;
