//! Walks a keyring, statefully tracking the current primary key, subkey,
//! and user-id as they appear in the stream, and verifies every
//! Signature packet whose issuer key-id matches the current primary
//! key's key-id.
//!
//! Signature type 0x10/0x12/0x13 (generic/casual/positive User ID
//! certification) is checked as a uid binding; 0x18 (subkey binding) is
//! checked as a subkey binding, including its embedded cross-signature
//! if present. Each dispatched signature prints one line of the form
//! `<key-id>: <sigtype> -> <result>`.

use std::fs;
use std::process::exit;

use clap::{App, Arg};
use openpgp_certify::crypto::verify::{parse_key, verify_subkey_binding, verify_uid_binding};
use openpgp_certify::packet::key::KeyPacket;
use openpgp_certify::packet::signature::Signature;
use openpgp_certify::packet::userid::UserIdPacket;
use openpgp_certify::Packet;

fn real_main() -> Result<(), String> {
    let matches = App::new("verifypgp")
        .about("Verifies User ID and subkey certifications on a keyring")
        .arg(
            Arg::with_name("keys")
                .value_name("KEYRING")
                .required(true)
                .help("The keyring file to verify"),
        )
        .get_matches();

    let path = matches.value_of_os("keys").expect("required argument");
    let data = fs::read(path).map_err(|e| format!("{}: {}", path.to_string_lossy(), e))?;
    let packets = openpgp_certify::parse(&data).map_err(|e| e.to_string())?;

    let mut current_primary: Option<&KeyPacket> = None;
    let mut current_subkey: Option<&KeyPacket> = None;
    let mut current_uid: Option<&UserIdPacket> = None;

    for packet in &packets {
        match packet {
            Packet::PublicKey(key) => {
                current_primary = Some(key);
                current_subkey = None;
                current_uid = None;
            }
            Packet::PublicSubkey(key) => {
                current_subkey = Some(key);
            }
            Packet::UserID(uid) => {
                current_uid = Some(uid);
            }
            Packet::Signature(sig) => {
                if let Some(primary) = current_primary {
                    handle_signature(primary, current_subkey, current_uid, sig);
                }
            }
            Packet::Unknown(_) => {}
        }
    }

    Ok(())
}

fn handle_signature(
    primary: &KeyPacket,
    subkey: Option<&KeyPacket>,
    uid: Option<&UserIdPacket>,
    sig: &Signature,
) {
    if sig.key_id() != primary.key_id().as_bytes() {
        return;
    }

    match u8::from(sig.sig_type()) {
        0x10 | 0x12 | 0x13 => {
            let Some(uid) = uid else { return };
            let result = match parse_key(primary) {
                Ok(attester) => match verify_uid_binding(primary, uid, &attester, sig) {
                    Ok(valid) => {
                        if valid {
                            "good".to_string()
                        } else {
                            "bad".to_string()
                        }
                    }
                    Err(e) => format!("error: {}", e),
                },
                Err(e) => format!("error: {}", e),
            };
            println!("{}: {} -> {}", primary.key_id(), sig.sig_type(), result);
        }
        0x18 => {
            let Some(subkey) = subkey else { return };
            let result = match verify_subkey_binding(primary, subkey, sig) {
                0 => "bad",
                1 => "good (no cross-signature)",
                _ => "good (cross-signed)",
            };
            println!("{}: {} -> {}", primary.key_id(), sig.sig_type(), result);
        }
        _ => {}
    }
}

fn main() {
    if let Err(message) = real_main() {
        eprintln!("Parse error:\n\t{}", message);
        exit(1);
    }
}
