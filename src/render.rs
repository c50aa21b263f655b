use std::borrow::Cow;
use std::fmt;
use std::sync::{PoisonError, RwLock};

use unicode_width::UnicodeWidthStr;

use crate::tree::Tree;

/// Glyphs and spacing used to draw a [`Tree`].
///
/// [`RenderOptions::default()`] snapshots the current process-wide defaults
/// (see [`default_options`]); the builder methods override single settings
/// for one call:
///
/// ```
/// # use text_tree::{RenderOptions, Tree};
/// let tree = Tree::new();
/// tree.add_leaf("hello").add_leaf("world");
/// let ascii = RenderOptions::default().link("|").mid("|--").end("`--");
/// assert_eq!(tree.render_with(&ascii), ".\n|-- hello\n`-- world\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    link: Cow<'static, str>,
    mid: Cow<'static, str>,
    end: Cow<'static, str>,
    indent: usize,
    separator: Cow<'static, str>,
}

struct DefaultGlyphs {
    link: Cow<'static, str>,
    mid: Cow<'static, str>,
    end: Cow<'static, str>,
    indent: usize,
}

static DEFAULTS: RwLock<DefaultGlyphs> = RwLock::new(DefaultGlyphs {
    link: Cow::Borrowed("│"),
    mid: Cow::Borrowed("├──"),
    end: Cow::Borrowed("└──"),
    indent: 3,
});

/// The process-wide default render configuration.
///
/// Applies to [`Tree::render`] and to every `RenderOptions` that does not
/// override the respective setting.
#[must_use]
pub fn default_options() -> RenderOptions {
    let defaults = DEFAULTS.read().unwrap_or_else(PoisonError::into_inner);
    RenderOptions {
        link: defaults.link.clone(),
        mid: defaults.mid.clone(),
        end: defaults.end.clone(),
        indent: defaults.indent,
        separator: Cow::Borrowed(" "),
    }
}

/// Replace the process-wide default link/mid/end glyphs and indent width.
///
/// Affects all subsequent default-configuration renders.
/// The separator is per-call only and always starts out as a single space.
pub fn set_default_options(options: &RenderOptions) {
    let mut defaults = DEFAULTS.write().unwrap_or_else(PoisonError::into_inner);
    defaults.link = options.link.clone();
    defaults.mid = options.mid.clone();
    defaults.end = options.end.clone();
    defaults.indent = options.indent;
}

impl Default for RenderOptions {
    fn default() -> Self {
        default_options()
    }
}

impl RenderOptions {
    /// Vertical continuation glyph drawn at ancestor levels that still have
    /// siblings below.
    #[must_use]
    pub fn link(mut self, glyph: impl Into<Cow<'static, str>>) -> Self {
        self.link = glyph.into();
        self
    }

    /// Connector for a child that has further siblings below it.
    #[must_use]
    pub fn mid(mut self, connector: impl Into<Cow<'static, str>>) -> Self {
        self.mid = connector.into();
        self
    }

    /// Connector for the last child among its siblings.
    #[must_use]
    pub fn end(mut self, connector: impl Into<Cow<'static, str>>) -> Self {
        self.end = connector.into();
        self
    }

    /// Number of spaces following the link glyph on each level.
    #[must_use]
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }

    /// Text between the connector and the label.
    #[must_use]
    pub fn separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.separator = separator.into();
        self
    }

    /// One level of prefix below a node that still has siblings to come.
    fn link_column(&self) -> String {
        format!("{}{}", self.link, " ".repeat(self.indent))
    }

    /// One level of prefix below a node that was the last of its siblings,
    /// matching the display width of [`link_column`](Self::link_column).
    fn blank_column(&self) -> String {
        " ".repeat(self.link.width() + self.indent)
    }
}

impl Tree {
    /// Render the tree below this node with the process-wide defaults.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    /// Render the tree below this node with an explicit configuration.
    ///
    /// A parentless node prints its own value (plus `[meta]  ` prefix when
    /// metadata is present) as a bare first line. A node that still has a
    /// parent is printed with a connector instead, followed by its children
    /// at the same indent level.
    ///
    /// Rendering never mutates the tree and recurses as deep as the tree
    /// goes; bounding the depth of untrusted input is up to the caller.
    #[must_use]
    pub fn render_with(&self, options: &RenderOptions) -> String {
        let mut out = String::new();
        let mut ended = Vec::new();
        if self.parent().is_none() {
            let value = self.value();
            if let Some(meta) = self.meta() {
                out.push_str(&format!("[{meta}]  {value}\n"));
            } else {
                out.push_str(&format!("{value}\n"));
            }
        } else {
            let connector = if self.has_children() {
                options.mid.clone()
            } else {
                ended.push(0);
                options.end.clone()
            };
            render_node(&mut out, options, self, 0, &ended, &connector);
        }
        let children = self.children();
        if !children.is_empty() {
            render_children(&mut out, options, &children, 0, &mut ended);
        }
        out
    }

    /// Render into a byte buffer. Equivalent to
    /// [`render_with`](Self::render_with).
    #[must_use]
    pub fn render_bytes(&self, options: &RenderOptions) -> Vec<u8> {
        self.render_with(options).into_bytes()
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.render())
    }
}

fn render_children(
    out: &mut String,
    options: &RenderOptions,
    children: &[Tree],
    level: usize,
    ended: &mut Vec<usize>,
) {
    for (index, child) in children.iter().enumerate() {
        let is_last = index + 1 == children.len();
        if is_last {
            ended.push(level);
        }
        let connector = if is_last { &options.end } else { &options.mid };
        render_node(out, options, child, level, ended, connector);
        let grandchildren = child.children();
        if !grandchildren.is_empty() {
            render_children(out, options, &grandchildren, level + 1, ended);
        }
        if is_last {
            ended.pop();
        }
    }
}

fn render_node(
    out: &mut String,
    options: &RenderOptions,
    node: &Tree,
    level: usize,
    ended: &[usize],
    connector: &str,
) {
    for column in 0..level {
        if ended.contains(&column) {
            out.push_str(&options.blank_column());
        } else {
            out.push_str(&options.link_column());
        }
    }
    out.push_str(connector);
    out.push_str(&options.separator);
    if let Some(meta) = node.meta() {
        out.push_str(&format!("[{meta}]  "));
    }
    out.push_str(&continued_value(options, node, level));
    out.push('\n');
}

/// The node's value with every line after the first re-indented, so
/// multi-line values line up under their own first line.
fn continued_value(options: &RenderOptions, node: &Tree, level: usize) -> String {
    let text = node.value().to_string();
    if !text.contains('\n') {
        return text;
    }
    let padding = continuation_padding(options, node, level);
    let mut result = String::new();
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            result.push('\n');
            result.push_str(&padding);
        }
        result.push_str(line);
    }
    result
}

/// Padding for the continuation lines of a multi-line value.
///
/// Walks from the node up toward the root. A level contributes a blank run
/// when its node is the last among its siblings (there is nothing to link to
/// below it) and the link glyph otherwise, so the vertical connection to the
/// next sibling is not interrupted. Segments are concatenated top-to-bottom.
/// The walk stops at a parentless node and stays within the display level,
/// leaving any unreached upper segments empty.
fn continuation_padding(options: &RenderOptions, node: &Tree, level: usize) -> String {
    let mut segments = vec![String::new(); level + 1];
    let mut remaining = level + 1;
    let mut current = node.clone();
    while remaining > 0 {
        let Some(parent) = current.parent() else {
            break;
        };
        remaining -= 1;
        let is_last = parent.last_child().is_some_and(|last| last == current);
        segments[remaining] = if is_last {
            options.blank_column()
        } else {
            options.link_column()
        };
        current = parent;
    }
    segments.concat()
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Mutex, MutexGuard, PoisonError};

    /// Held around every test render that reads the process defaults, so
    /// the tests mutating them cannot interleave with the rest.
    static DEFAULTS_LOCK: Mutex<()> = Mutex::new(());

    pub(crate) fn defaults_guard() -> MutexGuard<'static, ()> {
        DEFAULTS_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
