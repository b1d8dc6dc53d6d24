extern crate text_wrap;
use std::fmt::{self, Write};
use text_wrap::{WrapOptions, Wrapper};

fn layout_text() -> Result<String, Box<dyn std::error::Error>> {
    let text = "Far out in the uncharted backwaters of the unfashionable end of the western spiral arm of the Galaxy lies a small unregarded yellow sun. Orbiting this at a distance of roughly ninety-two million miles is an utterly insignificant little blue-green planet whose ape-descended life forms are so amazingly primitive that they still think digital watches are a pretty neat idea.";
    let wrapper = Wrapper::new(WrapOptions::new(40))?;
    let lines = wrapper.wrap_str(text)?;
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
