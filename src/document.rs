// Mon Oct 19 2026 - Alex

use std::fmt;

pub const PROMPT_SEPARATOR: &str = "\n\n---\n**Data to Process:**\n\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDocument {
    pub notes: String,
    pub log: String,
    pub diff: String,
}

impl ReleaseDocument {
    pub fn new(notes: impl Into<String>, log: impl Into<String>, diff: impl Into<String>) -> Self {
        Self {
            notes: notes.into(),
            log: log.into(),
            diff: diff.into(),
        }
    }

    pub fn commit_count(&self) -> usize {
        self.log.lines().filter(|line| !line.trim().is_empty()).count()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn render_with_prompt(&self, prompt: Option<&str>) -> String {
        match prompt {
            Some(prompt) => format!("{}{}{}", prompt, PROMPT_SEPARATOR, self),
            None => self.render(),
        }
    }
}

impl fmt::Display for ReleaseDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Release Context")?;
        writeln!(f)?;
        writeln!(f, "## Strategic Context / Adhoc Notes")?;
        writeln!(f, "{}", self.notes)?;
        writeln!(f)?;
        writeln!(f, "## Commit History")?;
        writeln!(f, "{}", self.log)?;
        writeln!(f)?;
        writeln!(f, "## Code Changes")?;
        writeln!(f, "```diff")?;
        writeln!(f, "{}", self.diff)?;
        writeln!(f, "```")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_layout() {
        let doc = ReleaseDocument::new("Ship it.", "- Add login\n- Fix crash", "+new line");

        let expected = "# Release Context\n\
\n\
## Strategic Context / Adhoc Notes\n\
Ship it.\n\
\n\
## Commit History\n\
- Add login\n\
- Fix crash\n\
\n\
## Code Changes\n\
```diff\n\
+new line\n\
```\n";

        assert_eq!(doc.render(), expected);
    }

    #[test]
    fn test_empty_sections_keep_headings() {
        let rendered = ReleaseDocument::new("No adhoc notes provided.", "", "").render();

        assert!(rendered.contains("## Commit History\n\n\n## Code Changes"));
        assert!(rendered.ends_with("```diff\n\n```\n"));
    }

    #[test]
    fn test_commit_count() {
        assert_eq!(ReleaseDocument::new("", "", "").commit_count(), 0);
        assert_eq!(ReleaseDocument::new("", "- a\n- b\n- c", "").commit_count(), 3);
    }

    #[test]
    fn test_prompt_is_prepended() {
        let doc = ReleaseDocument::new("n", "l", "d");

        let rendered = doc.render_with_prompt(Some("You write release notes."));
        assert!(rendered.starts_with("You write release notes.\n\n---\n**Data to Process:**\n\n# Release Context\n"));
        assert_eq!(doc.render_with_prompt(None), doc.render());
    }
}
