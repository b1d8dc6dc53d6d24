extern crate text_wrap;
use std::fmt::{self, Write};
use text_wrap::{WrapOptions, Wrapper};

fn layout_text(cost_exponent: f64) -> Result<String, Box<dyn std::error::Error>> {
    let text = "FaroutintheunchartedbackwatersoftheunfashionableendofthewesternspiralarmoftheGalaxy lies a small unregarded yellow sun. Orbiting this at a distance of roughly ninety-two million miles is an utterly insignificant little blue-green planet.";
    let options = WrapOptions::new(40).with_cost_exponent(cost_exponent);
    let lines = Wrapper::new(options)?.wrap_str(text)?;
    Ok(render(&lines, 40)?)
}

fn render(lines: &[&str], width: usize) -> Result<String, fmt::Error> {
    let mut result = String::new();
    writeln!(&mut result, "┏{}┓", "━".repeat(width))?;
    for l in lines {
        let pad = width.saturating_sub(l.chars().count());
        writeln!(&mut result, "┃{}{}┃", l, " ".repeat(pad))?;
    }
    writeln!(&mut result, "┗{}┛", "━".repeat(width))?;
    Ok(result)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    print!("{}", layout_text(0.0)?);
    print!("{}", layout_text(2.0)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: &str = r#"┏━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┓
┃FaroutintheunchartedbackwatersoftheunfashionableendofthewesternspiralarmoftheGalaxy┃
┃lies a small unregarded yellow sun.     ┃
┃Orbiting this at a distance of roughly  ┃
┃ninety-two million miles is an utterly  ┃
┃insignificant little blue-green planet. ┃
┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛
"#;

    #[test]
    fn greedy_overflow() {
        assert!(layout_text(0.0).unwrap() == EXPECTED);
    }

    #[test]
    fn dynamic_overflow() {
        assert!(layout_text(2.0).unwrap() == EXPECTED);
    }
}
