use circhash_rs::{check_rotation_invariance, CircHashError, Fingerprinter};

const PLASMID: &str = include_str!("plasmid_ori.seq");

fn main() -> Result<(), CircHashError> {
    let seq = PLASMID.trim_end().as_bytes();
    let fp: Fingerprinter = Fingerprinter::new();

    println!("length:      {}", seq.len());
    println!("fingerprint: {}", fp.fingerprint(seq)?);

    let report = check_rotation_invariance(&fp, seq)?;
    println!(
        "rotations:   {} ({} distinct digest{})",
        report.rotations,
        report.distinct,
        if report.distinct == 1 { "" } else { "s" }
    );
    match report.mismatch {
        None => println!("all rotations produce the same fingerprint"),
        Some(i) => println!("rotation {} disagrees with rotation 0", i),
    }

    Ok(())
}
