use text_tree::third_party::json;
use text_tree::RenderOptions;

const DOCUMENT: &str = r#"{
    "name": "laura",
    "age": 7,
    "pets": ["dog", "cat"],
    "address": {"street": "Main St", "number": 12}
}"#;

fn main() {
    let document: serde_json::Value =
        serde_json::from_str(DOCUMENT).expect("the embedded document is valid JSON");
    let tree = json::tree(&document);

    print!("{tree}");

    println!();
    println!("The same tree with ASCII glyphs:");
    let ascii = RenderOptions::default().link("|").mid("|--").end("`--");
    print!("{}", tree.render_with(&ascii));
}
