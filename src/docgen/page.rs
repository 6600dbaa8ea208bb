//! Per-map Markdown page generation.
//!
//! Assembles the title, an inline image preview, and the fixed licensing
//! and import instructions into a complete `README.md`. The boilerplate is
//! reproduced byte for byte so regenerated pages match those already
//! published alongside the maps.

use std::path::Path;

use crate::docgen::map::MapFile;
use crate::docgen::title::title_from_path;

/// Link to the map repository license.
const LICENSE_URL: &str = "https://github.com/dnd-apps/vtt-maps/blob/main/LICENSE";

/// Link to the Dungeondraft project.
const DUNGEONDRAFT_URL: &str = "https://dungeondraft.net/";

/// Link to the Foundry VTT importer module.
const FVTT_IMPORTER_URL: &str = "https://github.com/moo-man/FVTT-DD-Import";

/// The inputs a page is rendered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapPage<'a> {
    /// Page heading.
    pub title: String,

    /// Base64 PNG payload for the preview data URI.
    pub image: &'a str,
}

impl<'a> MapPage<'a> {
    /// Build the page inputs for a decoded map.
    #[must_use]
    pub fn from_map(map: &'a MapFile, extension: &str) -> Self {
        Self::new(&map.path, &map.image, extension)
    }

    /// Build the page inputs from a map path and its raw image payload.
    #[must_use]
    pub fn new(path: &Path, image: &'a str, extension: &str) -> Self {
        Self {
            title: title_from_path(path, extension),
            image,
        }
    }
}

/// Render a complete Markdown page.
///
/// The output starts and ends with a blank line.
#[must_use]
pub fn render_page(page: &MapPage<'_>) -> String {
    let mut sections = Vec::new();

    sections.push(String::new());
    sections.push(format!("# {}", page.title));
    sections.push(format!(
        "![image preview](data:image/png;base64,{})",
        page.image
    ));
    sections.push(String::new());

    render_agreement(&mut sections);
    render_instructions(&mut sections);
    render_foundry_steps(&mut sections);

    sections.push(String::new());
    sections.join("\n")
}

/// Render the license agreement section.
fn render_agreement(sections: &mut Vec<String>) {
    sections.push("## Agreement".to_string());
    sections.push(String::new());
    sections.push(
        "All images, assets, and file are provided within accordance what is outline in the repositories license file."
            .to_string(),
    );
    sections.push(format!(
        "[Please see the license for mre information if you have questions.]({LICENSE_URL})"
    ));
    sections.push(String::new());
}

/// Render the attribution and compatibility notes.
fn render_instructions(sections: &mut Vec<String>) {
    sections.push("## Instruction".to_string());
    sections.push(String::new());
    sections.push(format!(
        "> [These maps are created with Dungeoundraft, if you are interested please check out that project here.]({DUNGEONDRAFT_URL})"
    ));
    sections.push(String::new());
    sections.push(
        "*These maps should be able to be imported on FoudryVTT, Roll20, or other applications that support the dd2vtt format.*"
            .to_string(),
    );
    sections.push(String::new());
}

/// Render the numbered Foundry VTT import steps.
fn render_foundry_steps(sections: &mut Vec<String>) {
    sections.push("### FoundryVTT".to_string());
    sections.push(String::new());
    sections.push(format!(
        "1. [Ensure you have the FVTT-DD-Importer installed and enabled.]({FVTT_IMPORTER_URL})"
    ));
    sections.push("2. Open the scenes section.".to_string());
    sections.push(
        "3. Go to the scene tab in FVTT, click the Universal Battlemap import button.".to_string(),
    );
    sections.push(
        "4. Fill in the scene name, a path to where the image is to be saved, and the fidelity/offset options."
            .to_string(),
    );
    sections.push(
        "  a. Fidelity: How many cave walls are used. Far left - less walls, better performance, Far right - more walls, worse performance"
            .to_string(),
    );
    sections.push("  b. Offset: How much to nudge the walls away from the edge.".to_string());
    sections.push(String::new());
}
