//! # Command Grammar
//!
//! Turns a typed line into a [`Command`]. The shell is permissive: anything
//! it does not understand parses to a no-op rather than an error.
//!
//! `cd` targets are resolved by an ordered rule table. Rules are tried top
//! to bottom and the first match wins, so the more specific forms must come
//! before the catch-alls.
//!
//! | rule         | accepts                                         |
//! |--------------|-------------------------------------------------|
//! | `parent`     | `~`, `~/`, `..`, `../`, empty                   |
//! | `section`    | `<page>`, `~/<page>`                            |
//! | `alias`      | `vericare-ai`                                   |
//! | `internship` | `[~/]internships/<slug>`, bare `<slug>`         |
//! | `idea`       | `[~/]ideas/<slug>`                              |
//! | `episode`    | `[~/]podcast/<n>` (1-based)                     |
//!
//! Targets are matched exactly; no slash normalisation happens, so `cd /`
//! or `cd internships/` resolve to nothing.

use crate::content::Catalog;
use crate::core::page::Page;

/// Where a `cd` resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CdTarget {
    /// Close the open overlay, or go home if none is open.
    Parent,
    Page(Page),
    Internship(String),
    Idea(String),
    Episode(usize),
    /// Nothing matched. Carried for logging only.
    Unresolved(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Cd(CdTarget),
    Clear,
    History,
    /// Anything else the visitor typed.
    Unrecognized,
}

type Rule = fn(&str, &Catalog) -> Option<CdTarget>;

const CD_RULES: &[(&str, Rule)] = &[
    ("parent", parent_rule),
    ("section", section_rule),
    ("alias", alias_rule),
    ("internship", internship_rule),
    ("idea", idea_rule),
    ("episode", episode_rule),
];

/// Internship aliases: (alias, canonical slug).
const INTERNSHIP_ALIASES: &[(&str, &str)] = &[("ema-unlimited", "ema")];

/// Parses a raw input line. Matching is case-insensitive.
pub fn parse(raw: &str, catalog: &Catalog) -> Command {
    let line = raw.trim().to_lowercase();
    if line == "cd" {
        return Command::Cd(resolve_cd("", catalog));
    }
    if let Some(target) = line.strip_prefix("cd ") {
        return Command::Cd(resolve_cd(target.trim(), catalog));
    }
    match line.as_str() {
        "clear" => Command::Clear,
        "history" => Command::History,
        _ => Command::Unrecognized,
    }
}

/// Resolves a (lowercased, trimmed) `cd` target against the rule table.
pub fn resolve_cd(target: &str, catalog: &Catalog) -> CdTarget {
    for (name, rule) in CD_RULES {
        if let Some(resolved) = rule(target, catalog) {
            log::debug!("cd '{}' matched rule '{}'", target, name);
            return resolved;
        }
    }
    CdTarget::Unresolved(target.to_string())
}

/// Strips a leading `~/`. Only the rules whose forms allow it call this.
fn strip_home(target: &str) -> &str {
    target.strip_prefix("~/").unwrap_or(target)
}

fn parent_rule(target: &str, _catalog: &Catalog) -> Option<CdTarget> {
    matches!(target, "~" | "~/" | ".." | "../" | "").then_some(CdTarget::Parent)
}

fn section_rule(target: &str, _catalog: &Catalog) -> Option<CdTarget> {
    Page::from_key(strip_home(target)).map(CdTarget::Page)
}

fn alias_rule(target: &str, _catalog: &Catalog) -> Option<CdTarget> {
    (target == "vericare-ai").then_some(CdTarget::Page(Page::Vericare))
}

fn internship_rule(target: &str, catalog: &Catalog) -> Option<CdTarget> {
    let slug = match strip_home(target).strip_prefix("internships/") {
        Some(nested) => nested,
        // A bare slug never carries a home prefix.
        None if !target.contains('/') => target,
        None => return None,
    };
    let slug = INTERNSHIP_ALIASES
        .iter()
        .find(|(alias, _)| *alias == slug)
        .map_or(slug, |(_, canonical)| *canonical);
    catalog
        .internship(slug)
        .map(|internship| CdTarget::Internship(internship.slug.clone()))
}

fn idea_rule(target: &str, catalog: &Catalog) -> Option<CdTarget> {
    let slug = strip_home(target).strip_prefix("ideas/")?;
    catalog.idea(slug).map(|idea| CdTarget::Idea(idea.slug.clone()))
}

fn episode_rule(target: &str, catalog: &Catalog) -> Option<CdTarget> {
    let number: usize = strip_home(target).strip_prefix("podcast/")?.parse().ok()?;
    let index = number.checked_sub(1)?;
    catalog.episode(index).map(|_| CdTarget::Episode(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cd(target: &str) -> CdTarget {
        match parse(&format!("cd {target}"), &Catalog::builtin()) {
            Command::Cd(t) => t,
            other => panic!("expected cd, got {:?}", other),
        }
    }

    #[test]
    fn test_parent_forms() {
        for target in ["~", "..", "../", "~/"] {
            assert_eq!(cd(target), CdTarget::Parent, "target {target:?}");
        }
        assert_eq!(parse("cd", &Catalog::builtin()), Command::Cd(CdTarget::Parent));
        assert_eq!(parse("  cd   ", &Catalog::builtin()), Command::Cd(CdTarget::Parent));
    }

    #[test]
    fn test_sections_with_and_without_home_prefix() {
        for page in Page::ALL {
            assert_eq!(cd(page.key()), CdTarget::Page(page));
            assert_eq!(cd(&format!("~/{}", page.key())), CdTarget::Page(page));
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(cd("PODCAST"), CdTarget::Page(Page::Podcast));
        assert_eq!(
            parse("CD Internships/Turing", &Catalog::builtin()),
            Command::Cd(CdTarget::Internship("turing".into()))
        );
    }

    #[test]
    fn test_vericare_alias() {
        assert_eq!(cd("vericare-ai"), CdTarget::Page(Page::Vericare));
    }

    #[test]
    fn test_internships_nested_bare_and_alias() {
        assert_eq!(cd("internships/turing"), CdTarget::Internship("turing".into()));
        assert_eq!(cd("~/internships/humanx"), CdTarget::Internship("humanx".into()));
        assert_eq!(cd("proshort"), CdTarget::Internship("proshort".into()));
        assert_eq!(cd("ema-unlimited"), CdTarget::Internship("ema".into()));
        assert_eq!(cd("internships/ema-unlimited"), CdTarget::Internship("ema".into()));
    }

    #[test]
    fn test_ideas_and_episodes() {
        assert_eq!(cd("ideas/resume-tailor"), CdTarget::Idea("resume-tailor".into()));
        assert_eq!(cd("podcast/1"), CdTarget::Episode(0));
        assert_eq!(cd("podcast/0"), CdTarget::Unresolved("podcast/0".into()));
        assert_eq!(cd("podcast/999"), CdTarget::Unresolved("podcast/999".into()));
    }

    #[test]
    fn test_unknown_targets_resolve_to_nothing() {
        assert_eq!(cd("nope"), CdTarget::Unresolved("nope".into()));
        assert_eq!(cd("internships/nope"), CdTarget::Unresolved("internships/nope".into()));
        assert_eq!(cd("ideas/nope"), CdTarget::Unresolved("ideas/nope".into()));
    }

    #[test]
    fn test_targets_outside_the_grammar_do_nothing() {
        for target in [
            "/",
            "///",
            "~//",
            "~/turing",
            "~/ema-unlimited",
            "~/vericare-ai",
            "internships/",
            "podcast/",
            "~/podcast/",
            "ideas/",
            "vericare-ai/",
            "turing/",
        ] {
            assert_eq!(
                cd(target),
                CdTarget::Unresolved(target.to_string()),
                "target {target:?}"
            );
        }
    }

    #[test]
    fn test_home_prefixed_nested_forms() {
        assert_eq!(cd("~/ideas/resume-tailor"), CdTarget::Idea("resume-tailor".into()));
        assert_eq!(cd("~/podcast/2"), CdTarget::Episode(1));
    }

    #[test]
    fn test_non_cd_commands() {
        let catalog = Catalog::builtin();
        assert_eq!(parse("clear", &catalog), Command::Clear);
        assert_eq!(parse(" HISTORY ", &catalog), Command::History);
        assert_eq!(parse("ls -la", &catalog), Command::Unrecognized);
        assert_eq!(parse("cdpodcast", &catalog), Command::Unrecognized);
        assert_eq!(parse("", &catalog), Command::Unrecognized);
    }
}
