use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=assets/");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("banner.rs");
    let mut f = fs::File::create(&dest_path).unwrap();

    let banner_path = Path::new("assets").join("banner.txt");
    let content = match fs::read_to_string(&banner_path) {
        Ok(content) => content,
        Err(_) => {
            writeln!(f, "pub const BANNER_LINES: &[&str] = &[];").unwrap();
            writeln!(f, "pub const BANNER_WIDTH: u16 = 0;").unwrap();
            return;
        }
    };

    // Trailing blank lines in the asset would render as dead space under the tower.
    let lines: Vec<&str> = content
        .lines()
        .map(|l| l.trim_start_matches('\u{feff}'))
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .skip_while(|l| l.trim().is_empty())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    writeln!(f, "pub const BANNER_LINES: &[&str] = &[").unwrap();
    for line in &lines {
        // Pad every row to the same width so centering keeps the columns aligned.
        let padded = format!("{:<width$}", line, width = width);
        writeln!(f, "    {:?},", padded).unwrap();
    }
    writeln!(f, "];").unwrap();
    writeln!(f, "pub const BANNER_WIDTH: u16 = {};", width).unwrap();
}
