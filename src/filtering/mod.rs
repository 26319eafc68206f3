/*! Filtering utilities

Filters are pure: they implement [filter::Filter] and hold no mutable state
(2 successive equal inputs -> 2 equal outputs).
The only filter used by the conversion pipeline is [title::SourceLanguage].
!*/
mod filter;
mod title;

pub use filter::Filter;
pub use title::SourceLanguage;
