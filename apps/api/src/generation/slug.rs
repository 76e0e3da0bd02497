//! URL slug normalisation for generated pages.

/// Longest slug we hand back. Longer model output is cut at a word boundary.
const MAX_SLUG_LEN: usize = 80;

/// Lowercases `input`, keeps ASCII alphanumerics, and joins the remaining
/// words with single hyphens. Returns an empty string if nothing survives.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.len() <= MAX_SLUG_LEN {
        return slug;
    }
    match slug[..MAX_SLUG_LEN].rfind('-') {
        Some(cut) => slug[..cut].to_string(),
        None => slug[..MAX_SLUG_LEN].to_string(),
    }
}

/// Picks the model's slug when it normalises to something usable, otherwise
/// derives one from the title.
pub fn resolve_slug(model_slug: &str, title: &str) -> String {
    let slug = slugify(model_slug);
    if slug.is_empty() {
        slugify(title)
    } else {
        slug
    }
}
