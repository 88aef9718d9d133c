//! Pronunciation cue lookup.
//!
//! The audio link sits next to the bolded display title in the first
//! sentence. Only links in that paragraph or inside a pronunciation container
//! are candidates. A candidate whose file name carries the title wins;
//! otherwise the first candidate inside a pronunciation container is used.

use url::Url;

use crate::dom::{self, LeadTree, NodeRef, Selection};
use crate::options::Selectors;
use crate::patterns;
use crate::result::Pronunciation;

/// Base used to resolve relative and protocol-relative links.
const RESOLVE_BASE: &str = "https://localhost/";

fn is_audio_link(href: &str, selectors: &Selectors) -> bool {
    let path = href.split(['?', '#']).next().unwrap_or(href).to_lowercase();
    selectors
        .audio_suffixes
        .iter()
        .any(|suffix| path.ends_with(&suffix.to_lowercase()))
}

/// File name from the last path segment, without a `File:` prefix.
fn file_name(href: &str) -> String {
    let segment = Url::parse(RESOLVE_BASE)
        .ok()
        .and_then(|base| base.join(href).ok())
        .and_then(|url| {
            url.path_segments()
                .and_then(|mut segments| segments.next_back().map(ToString::to_string))
        })
        .unwrap_or_else(|| href.rsplit('/').next().unwrap_or(href).to_string());

    segment
        .strip_prefix("File:")
        .map(ToString::to_string)
        .unwrap_or(segment)
}

/// Title forms looked for in a file name: underscored first, then spaced.
fn title_terms(plain_title: &str) -> Vec<String> {
    if plain_title.is_empty() {
        return Vec::new();
    }
    let underscored = plain_title.replace(' ', "_");
    if underscored == plain_title {
        vec![underscored]
    } else {
        vec![underscored, plain_title.to_string()]
    }
}

/// First paragraph holding the display title in bold.
fn title_paragraph<'a>(body: &Selection<'a>, plain_title: &str) -> Option<NodeRef<'a>> {
    if plain_title.is_empty() {
        return None;
    }
    dom::select_all(body, "p").nodes().iter().copied().find(|paragraph| {
        dom::select_all(&Selection::from(*paragraph), "b, strong")
            .nodes()
            .iter()
            .any(|bold| patterns::plain_heading(&bold.text()).eq_ignore_ascii_case(plain_title))
    })
}

struct Candidate {
    href: String,
    file_name: String,
    in_container: bool,
}

/// Find the pronunciation audio file of the page. Never modifies the tree.
#[must_use]
pub fn parse_pronunciation(tree: &LeadTree, display_title: &str, selectors: &Selectors) -> Option<Pronunciation> {
    let body = tree.body();
    let plain_title = patterns::plain_heading(display_title);
    let paragraph = title_paragraph(&body, &plain_title);

    let links = dom::select_all(&body, "a[href]");
    let candidates: Vec<Candidate> = links
        .nodes()
        .iter()
        .filter_map(|node| {
            let href = node.attr("href")?.to_string();
            if !is_audio_link(&href, selectors) {
                return None;
            }
            let in_container = node
                .ancestors_it(None)
                .any(|ancestor| ancestor.is(&selectors.pronunciation));
            let in_paragraph = paragraph
                .is_some_and(|p| node.ancestors_it(None).any(|ancestor| ancestor.id == p.id));
            (in_container || in_paragraph).then(|| Candidate {
                file_name: file_name(&href),
                href,
                in_container,
            })
        })
        .collect();

    let terms = title_terms(&plain_title);
    let chosen = candidates
        .iter()
        .find(|candidate| terms.iter().any(|term| candidate.file_name.contains(term.as_str())))
        .or_else(|| candidates.iter().find(|candidate| candidate.in_container))?;

    Some(Pronunciation {
        url: chosen.href.clone(),
        file_name: chosen.file_name.clone(),
    })
}
