//! Reads a file (or standard input, given `-`), parses it as a stream of
//! OpenPGP packets, and prints the resulting tree, one
//! `Packet: <description>` line per packet, indented four spaces per
//! nesting level.

use std::fs;
use std::io::{self, Read};
use std::process::exit;

use clap::{App, Arg};
use openpgp_certify::Packet;

fn print_packet(packet: &Packet, level: usize) {
    println!("{}Packet: {}", "    ".repeat(level), packet.description());
    for subpacket in packet.subpackets() {
        print_packet(subpacket, level + 1);
    }
}

fn real_main() -> Result<(), String> {
    let matches = App::new("parsepgp")
        .about("Dumps the packet tree of an OpenPGP binary message")
        .arg(
            Arg::with_name("file")
                .value_name("FILE")
                .required(true)
                .help("The file to parse"),
        )
        .get_matches();

    let path = matches.value_of_os("file").expect("required argument");
    let data = if path == std::ffi::OsStr::new("-") {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .map_err(|e| format!("<stdin>: {}", e))?;
        buf
    } else {
        fs::read(path).map_err(|e| format!("{}: {}", path.to_string_lossy(), e))?
    };

    let packets = openpgp_certify::parse(&data).map_err(|e| e.to_string())?;
    for packet in &packets {
        print_packet(packet, 0);
    }
    Ok(())
}

fn main() {
    if let Err(message) = real_main() {
        eprintln!("Parse error:\n\t{}", message);
        exit(1);
    }
}
