#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]

/*!
Compose trees of values and render them as text diagrams.

A [`Tree`] is built through its append operations ([`Tree::add_leaf`] for
siblings, [`Tree::add_branch`] to descend a level) and turned into text with
[`Tree::render`]. Node payloads are [`Value`]s and can carry an optional
metadata [`Value`] shown as a bracketed prefix. Glyphs and indentation are
configured per call with [`RenderOptions`] or process-wide with
[`set_default_options`].

# Example

```
use text_tree::Tree;

let tree = Tree::new();
tree.add_leaf("Dockerfile").add_leaf("Makefile");
let bin = tree.add_branch_with_meta(" 204", "bin");
bin.add_leaf("dbmaker").add_leaf("testtool");

assert_eq!(
    tree.render(),
    "\
.
├── Dockerfile
├── Makefile
└── [ 204]  bin
    ├── dbmaker
    └── testtool
"
);
```
*/

mod render;
pub mod third_party;
mod tree;
mod value;

pub use crate::render::{default_options, set_default_options, RenderOptions};
pub use crate::tree::Tree;
pub use crate::value::Value;
