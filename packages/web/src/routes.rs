//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::PublicLayout;
use crate::pages::{Compare, Listings, NotFound, Property};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PublicLayout)]
        #[route("/")]
        Listings {},

        #[route("/compare")]
        Compare {},

        #[route("/property/:slug")]
        Property { slug: String },

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
