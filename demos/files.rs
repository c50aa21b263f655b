use text_tree::Tree;

fn main() {
    let tree = Tree::new();
    tree.add_leaf("Dockerfile").add_leaf("Makefile").add_leaf("aws.sh");
    tree.add_branch_with_meta(" 204", "bin")
        .add_leaf("dbmaker")
        .add_leaf("someserver")
        .add_leaf("testtool");
    tree.add_branch_with_meta(" 374", "deploy")
        .add_leaf("Makefile")
        .add_leaf("bootstrap.sh");
    tree.add_leaf_with_meta("122K", "testtool.a");

    print!("{tree}");
}
