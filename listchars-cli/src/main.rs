/// List the Unicode codepoints supported by a font
///
/// Opens a font file, unions the codepoints of its Unicode cmap
/// subtables, and writes them to a text file as one lowercase
/// hexadecimal value per line, in ascending order. The number of
/// codepoints found is printed to standard output.
use clap::Parser;
use env_logger::Env;
use listchars_lib::font::CharsetFont;
use listchars_lib::hexlist::hex_lines;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output file for the codepoint list
    #[clap(long = "output", default_value = "supported_chars.txt")]
    output: PathBuf,

    /// The font file to examine (exactly one)
    #[clap(value_name = "FONT")]
    font: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let [font_path] = cli.font.as_slice() else {
        println!("Usage: listchars <FONT>");
        std::process::exit(1);
    };

    let font_binary = std::fs::read(font_path).expect("Couldn't open file");
    let font = CharsetFont::new(&font_binary).expect("Couldn't parse font");

    println!("{}", font.codepoints.len());
    std::fs::write(&cli.output, hex_lines(font.codepoints.iter().copied()))
        .expect("Couldn't write output file");
}
