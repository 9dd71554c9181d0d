//! Instruction templates for the two assistant calls.

use texture_types::TrustedReference;

/// Stage 1: ask the assistant to web-search the allowlisted libraries.
pub fn search_instruction(topic: &str, domains: &[String]) -> String {
    format!(
        "Search for free 4K {topic} textures available for download without watermarks. \
         Focus on sites like {sites}. Find specific texture names and their download pages.",
        sites = join_sites(domains),
    )
}

/// Stage 2: ask the assistant to turn stage-1 findings into a JSON array.
pub fn structuring_instruction(topic: &str, refs: &[TrustedReference], context: &str) -> String {
    let listed = refs
        .iter()
        .map(|r| format!("- {}: {}", r.title, r.url))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Based on these search results for free 4K {topic} textures, create a JSON array of texture entries.\n\
         \n\
         Search results:\n\
         {listed}\n\
         \n\
         Additional context: {context}\n\
         \n\
         Return ONLY a JSON array (no markdown, no backticks) with objects containing:\n\
         - \"title\": descriptive name of the texture\n\
         - \"source\": website name (e.g. \"Poly Haven\", \"ambientCG\")\n\
         - \"pageUrl\": the actual URL to download page\n\
         - \"searchTerm\": a good search term to find a preview image of this specific texture\n\
         \n\
         Return 6-10 entries. Only include textures that are genuinely free (CC0 or similar) and available in 4K."
    )
}

fn join_sites(domains: &[String]) -> String {
    match domains {
        [] => "well-known free texture libraries".to_string(),
        [only] => only.clone(),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}
