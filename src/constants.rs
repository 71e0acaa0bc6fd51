// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

/// Document type of the publication collection in the CMS repository.
pub const POSTS_DOCUMENT_TYPE: &str = "posts";

/// How many summaries the listing requests per page.
///
/// The listing grows in increments of this size each time the reader
/// asks for more posts.
pub const LISTING_PAGE_SIZE: u32 = 5;

/// Backend ordering applied to every listing query.
///
/// The merge engine performs no client-side sorting; the aggregated
/// listing is correct only because every page arrives in this order.
pub const LISTING_ORDERINGS: &str = "[document.first_publication_date desc]";

/// Page size used for the build-time identifier enumeration.
///
/// 100 is the backend maximum for a single page of results. The
/// enumeration is a single unpaginated fetch, so a repository holding
/// more documents than this is silently truncated by the backend.
pub const ENUMERATION_PAGE_LIMIT: u32 = 100;

/// Assumed reading speed for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;
