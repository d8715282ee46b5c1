use optscan::{OptionSpec, OptionTable};

fn main() {
    let parser = OptionTable::new("script")
        .add(OptionSpec::named("verbose", 'v').help("Enable verbose mode"))
        .add(OptionSpec::named("output", 'o').help("Specify output file"))
        .add(OptionSpec::named("port", 'p').help("Specify port number"))
        .build();

    let parsed = parser.parse();
    println!("Parsed arguments: {parsed}");
}
