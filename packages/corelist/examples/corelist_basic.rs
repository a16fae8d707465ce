//! Basic parsing and emitting of processor index lists.

use new_zealand::nz;

fn main() {
    let cores = corelist::parse("0,2,4,6", nz!(128)).unwrap();

    println!("Selected processors: {cores:?}");
    println!("As a list: {}", corelist::emit(&cores));
}
