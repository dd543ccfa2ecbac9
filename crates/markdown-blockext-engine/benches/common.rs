// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\nParagraph with some content and a [Title] link.\n\n## Section\n\n@{\"type\": \"warning\"}\n! Careful with\n! this one.\n\n@{\n  \"title\": \"example.rs\",\n  \"line_numbers\": true\n}\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_sections(sections: usize, depth: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        for level in 1..=depth.min(6) {
            content.push_str(&format!("{} Section {section} level {level}\n\n", "#".repeat(level)));
            content.push_str("Some paragraph content for this level.\n\n");
        }
    }

    content
}
