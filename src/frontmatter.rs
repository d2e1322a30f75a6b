//! Hugo front matter, in TOML format, with learn-theme extensions.
//!
//! <https://gohugo.io/content-management/front-matter/>
//!
//! Generated pages get a front-matter block prepended so the site generator
//! can title, order, and hide them. Omitted optional fields are left out of
//! the block entirely, never emitted as empty keys.

/// Front-matter block for one generated content page.
///
/// # Example
/// ```ignore
/// let block = FrontMatter::new()
///     .title("acme.prep")
///     .weight(2)
///     .hidden(true)
///     .render();
/// ```
#[derive(Debug, Clone)]
pub struct FrontMatter {
    title: Option<String>,
    menu_title: Option<String>,
    weight: i32,
    disable_toc: bool,
    hidden: bool,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: None,
            menu_title: None,
            weight: 4,
            disable_toc: false,
            hidden: false,
        }
    }
}

#[allow(unused)]
impl FrontMatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn menu_title(mut self, menu_title: impl Into<String>) -> Self {
        self.menu_title = Some(menu_title.into());
        self
    }

    pub const fn weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    pub const fn disable_toc(mut self, disable_toc: bool) -> Self {
        self.disable_toc = disable_toc;
        self
    }

    pub const fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Render the block, `+++` delimited, with a blank line after it so the
    /// page body can be appended directly.
    pub fn render(&self) -> String {
        let mut out = String::from("+++\n");

        if let Some(title) = &self.title {
            out.push_str(&format!("title = \"{title}\"\n"));
        }
        if let Some(menu_title) = &self.menu_title {
            out.push_str(&format!("menuTitle = \"{menu_title}\"\n"));
        }
        out.push_str(&format!("weight = {}\n", self.weight));
        if self.disable_toc {
            out.push_str("disableToc = true\n");
        }
        if self.hidden {
            out.push_str("hidden = true\n");
        }

        out.push_str("+++\n\n");
        out
    }
}

// ============================================================================
// Tests
// ============================================================================
