//! REST endpoint table, relative to the API base.

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Every server operation the client uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    RegisterArtist,
    Artworks,
    Artwork(u32),
    SubmitArtwork,
    Vote,
    FinalizeSelection,
    Catalog,
    ArtistSummary(u32),
    Artists,
    SubmitDossier,
    ArtworkImage(u32),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Artworks
            | Endpoint::Artwork(_)
            | Endpoint::Catalog
            | Endpoint::ArtistSummary(_)
            | Endpoint::Artists
            | Endpoint::ArtworkImage(_) => Method::Get,
            Endpoint::Login
            | Endpoint::RegisterArtist
            | Endpoint::SubmitArtwork
            | Endpoint::Vote
            | Endpoint::FinalizeSelection
            | Endpoint::SubmitDossier => Method::Post,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::Login => "/auth/login".to_string(),
            Endpoint::RegisterArtist => "/auth/register/artist".to_string(),
            Endpoint::Artworks => "/artworks".to_string(),
            Endpoint::Artwork(id) => format!("/artwork/{}", id),
            Endpoint::SubmitArtwork => "/artwork".to_string(),
            Endpoint::Vote => "/vote".to_string(),
            Endpoint::FinalizeSelection => "/selection/finalize".to_string(),
            Endpoint::Catalog => "/pdf/generate/catalog".to_string(),
            Endpoint::ArtistSummary(id) => format!("/pdf/generate/artist-summary/{}", id),
            Endpoint::Artists => "/artists".to_string(),
            Endpoint::SubmitDossier => "/submit-artwork".to_string(),
            Endpoint::ArtworkImage(id) => format!("/artwork/{}/image", id),
        }
    }

    /// Absolute URL under `base`. A trailing slash on `base` is ignored.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }

    /// Subject used in "not found" messages.
    pub fn subject(&self) -> String {
        match self {
            Endpoint::Artwork(id) | Endpoint::ArtworkImage(id) => format!("artwork {}", id),
            Endpoint::ArtistSummary(id) => format!("artist {}", id),
            other => other.path(),
        }
    }
}
