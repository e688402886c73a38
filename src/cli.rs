use crate::{DanglingKeyPolicy, Options, StreamCompleter, complete_to_string};
use std::env;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] [INPUT]\n\
         \n\
         INPUT: optional input file. When omitted, reads from stdin.\n\
         \n\
         Options:\n\
           -o, --output FILE         Write output to FILE (default stdout)\n\
               --stream              Feed input chunk by chunk, print the final completion\n\
               --chunk-size BYTES    Chunk size for streaming (default 65536)\n\
               --watch STEP          Complete every prefix of INPUT, STEP chars at a time,\n\
                                     reporting each prefix and its completion\n\
               --pretty              Pretty-print the completed JSON\n\
               --no-validate         Skip the post-completion validation parse\n\
               --dangling-key POLICY elide|empty (default elide)\n\
               --log                 Print the completion log to stderr\n\
           -h, --help                Show this help\n",
        prog = program
    );
}

fn parse_args() -> (Options, CliMode) {
    let mut args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "jsoncomplete".to_string());
    args.remove(0);

    let mut opts = Options::default();
    let mut input: Option<String> = None;
    let mut output: Option<String> = None;
    let mut stream = false;
    let mut chunk_size: usize = 65536;
    let mut watch: Option<usize> = None;
    let mut pretty = false;
    let mut log = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(&program);
                std::process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --output");
                    std::process::exit(2);
                }
                output = Some(args[i].clone());
            }
            "--stream" => {
                stream = true;
            }
            "--chunk-size" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing BYTES for --chunk-size");
                    std::process::exit(2);
                }
                chunk_size = args[i].parse().unwrap_or(65536);
            }
            "--watch" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing STEP for --watch");
                    std::process::exit(2);
                }
                match args[i].parse::<usize>() {
                    Ok(step) if step > 0 => watch = Some(step),
                    _ => {
                        eprintln!("STEP for --watch must be a positive integer");
                        std::process::exit(2);
                    }
                }
            }
            "--pretty" => {
                pretty = true;
            }
            "--no-validate" => {
                opts.validate_output = false;
            }
            "--dangling-key" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing POLICY for --dangling-key");
                    std::process::exit(2);
                }
                match args[i].to_lowercase().as_str() {
                    "elide" => opts.dangling_key_policy = DanglingKeyPolicy::Elide,
                    "empty" => opts.dangling_key_policy = DanglingKeyPolicy::EmptyKey,
                    other => {
                        eprintln!("Unknown dangling-key policy: {}", other);
                        std::process::exit(2);
                    }
                }
            }
            "--log" => {
                opts.logging = true;
                log = true;
            }
            s if s.starts_with('-') => {
                eprintln!("Unknown option: {}", s);
                std::process::exit(2);
            }
            path => {
                input = Some(path.to_string());
            }
        }
        i += 1;
    }

    let mode = CliMode {
        input,
        output,
        stream,
        chunk_size,
        watch,
        pretty,
        log,
    };
    (opts, mode)
}

struct CliMode {
    input: Option<String>,
    output: Option<String>,
    stream: bool,
    chunk_size: usize,
    watch: Option<usize>,
    pretty: bool,
    log: bool,
}

fn read_input(mode: &CliMode) -> io::Result<String> {
    match &mode.input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}

fn emit(s: &str, pretty: bool, w: &mut dyn Write) -> Result<(), Box<dyn std::error::Error>> {
    if pretty {
        #[cfg(feature = "serde")]
        {
            let v: serde_json::Value = serde_json::from_str(s)?;
            let pp = serde_json::to_string_pretty(&v)?;
            writeln!(w, "{}", pp)?;
            return Ok(());
        }
    }
    writeln!(w, "{}", s)?;
    Ok(())
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (opts, mode) = parse_args();

    let mut out_writer: Box<dyn Write> = if let Some(ref o) = mode.output {
        Box::new(BufWriter::new(File::create(o)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    if let Some(step) = mode.watch {
        // Growing-prefix driver: complete every prefix of the document,
        // STEP chars longer each round, through the stateless public API.
        let content = read_input(&mode)?;
        let chars: Vec<char> = content.trim_end_matches('\n').chars().collect();
        let mut c = StreamCompleter::new(opts.clone());
        let mut at = 0usize;
        while at < chars.len() {
            let end = (at + step).min(chars.len());
            let chunk: String = chars[at..end].iter().collect();
            let completed = c.push(&chunk)?;
            writeln!(out_writer, "chunk: {}", c.fragment())?;
            writeln!(out_writer, "json:  {}", completed)?;
            at = end;
        }
        out_writer.flush()?;
        return Ok(());
    }

    if mode.stream {
        let mut c = StreamCompleter::new(opts.clone());
        let mut buf = vec![0u8; mode.chunk_size.max(1024)];
        let mut reader: Box<dyn Read> = match &mode.input {
            Some(path) => Box::new(BufReader::new(File::open(path)?)),
            None => Box::new(io::stdin()),
        };
        let mut last = String::new();
        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            let chunk = std::str::from_utf8(&buf[..n]).map_err(|_| {
                io::Error::new(io::ErrorKind::InvalidData, "input is not valid UTF-8")
            })?;
            last = c.push(chunk)?;
        }
        if last.is_empty() {
            last = c.flush()?;
        }
        emit(&last, mode.pretty, &mut out_writer)?;
        out_writer.flush()?;
        return Ok(());
    }

    let content = read_input(&mode)?;
    let trimmed = content.trim_end_matches('\n');
    if mode.log {
        let (s, entries) = crate::complete_to_string_with_log(trimmed, &opts)?;
        for e in &entries {
            eprintln!("{} at {} near {:?}", e.message, e.position, e.context);
        }
        emit(&s, mode.pretty, &mut out_writer)?;
    } else {
        let s = complete_to_string(trimmed, &opts)?;
        emit(&s, mode.pretty, &mut out_writer)?;
    }
    out_writer.flush()?;
    Ok(())
}
