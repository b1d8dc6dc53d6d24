extern crate fixed;
extern crate text_wrap;

use fixed::types::I32F32;
use std::fmt::{self, Write};
use text_wrap::{
    build_lines, measure, Boundaries, Dynamic, Fixed, Locale, UnicodeClassifier, UnicodeSegmenter,
    WrapPolicy,
};

type F = Fixed<I32F32>;

fn layout_paragraph<'a, P: WrapPolicy>(
    paragraph: &'a str,
    layout: &P,
    max_width: usize,
) -> Result<Vec<&'a str>, Box<dyn std::error::Error>> {
    // Find the break opportunities and measure the words between them.
    let boundaries = Boundaries::segment(&UnicodeSegmenter, paragraph, &Locale::root())?;
    let words = measure(paragraph.as_bytes(), &boundaries, &UnicodeClassifier)?;

    // Calculate the paragraph's breaks.
    let breaks = layout.plan(&words, max_width);

    // Slice the paragraph into lines.
    let lines = build_lines(paragraph.as_bytes(), &boundaries, &words, &breaks)
        .into_iter()
        .map(std::str::from_utf8)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines)
}

fn layout_text() -> Result<String, Box<dyn std::error::Error>> {
    let text = "Far out in the uncharted backwaters of the unfashionable end of the western spiral arm of the Galaxy lies a small unregarded yellow sun. Orbiting this at a distance of roughly ninety-two million miles is an utterly insignificant little blue-green planet whose ape-descended life forms are so amazingly primitive that they still think digital watches are a pretty neat idea.";
    let dynamic = Dynamic::<F>::new().with_exponent(2.0);
    let lines = layout_paragraph(text, &dynamic, 40)?;
    Ok(render(&lines, 40)?)
}

fn render(lines: &[&str], width: usize) -> Result<String, fmt::Error> {
    let mut result = String::new();
    writeln!(&mut result, "┏{}┓", "━".repeat(width))?;
    for l in lines {
        let pad = width - l.chars().count();
        writeln!(&mut result, "┃{}{}┃", l, " ".repeat(pad))?;
    }
    writeln!(&mut result, "┗{}┛", "━".repeat(width))?;
    Ok(result)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", layout_text()?);
    Ok(())
}
