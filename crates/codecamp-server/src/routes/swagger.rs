//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{CampModel, SpeakerModel, TalkModel};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Camp endpoints
        super::camps::list_camps,
        super::camps::search_camps,
        super::camps::get_camp,
        super::camps::create_camp,
        super::camps::update_camp,
        super::camps::delete_camp,
    ),
    info(
        title = "CodeCamp API",
        version = "0.1.0",
        description = "Camps, their talks and speakers.\n\nCamps are addressed by moniker; talks are read-only and nested under their camp.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Camps", description = "Camp management"),
    ),
    components(
        schemas(
            CampModel,
            TalkModel,
            SpeakerModel,
        )
    ),
)]
pub struct ApiDoc;
