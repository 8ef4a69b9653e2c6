use clap::{App, Arg};
use env_logger::Env;
use log::{error, info};
use safenbt::{from_reader_named, gzip::from_gzip_reader_named, ReadLimiter};
use std::fs::File;
use std::io::{self, BufReader, Read};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn open(path: Option<&str>) -> Result<Box<dyn Read>> {
    Ok(match path {
        None | Some("-") => Box::new(io::stdin()),
        Some(path) => Box::new(File::open(path)?),
    })
}

fn run() -> Result<()> {
    let matches = App::new("nbt-dump")
        .about("Print the contents of an NBT file")
        .arg(
            Arg::with_name("file")
                .help("file to read, or - for stdin")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("raw")
                .long("raw")
                .help("input is not GZip compressed"),
        )
        .arg(
            Arg::with_name("budget")
                .long("budget")
                .takes_value(true)
                .required(false)
                .help("refuse input that would decode to more than this many bytes"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("print as JSON rather than NBT notation"),
        )
        .get_matches();

    let mut limiter = match matches.value_of("budget") {
        Some(budget) => ReadLimiter::new(budget.parse()?),
        None => ReadLimiter::unlimited(),
    };

    let input = open(matches.value_of("file"))?;
    let (name, root) = if matches.is_present("raw") {
        from_reader_named(BufReader::new(input), &mut limiter)?
    } else {
        from_gzip_reader_named(input, &mut limiter)?
    };

    info!(
        "root {:?}: {} entries, {} bytes charged",
        name,
        root.len(),
        limiter.read()
    );

    if matches.is_present("json") {
        println!("{}", serde_json::to_string_pretty(&root)?);
    } else {
        println!("{}", root);
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
