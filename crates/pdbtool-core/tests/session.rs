use pdbtool_core::core::io::pdb::{PdbError, PdbFile};
use pdbtool_core::core::io::traits::StructureFile;
use pdbtool_core::engine::config::QueryConfigBuilder;
use pdbtool_core::workflows::session::Session;
use std::io::Write;
use tempfile::NamedTempFile;

const STRUCTURE: &str = "\
HEADER    HYDROLASE                               01-JAN-00   1ABC
REMARK   2 RESOLUTION.    1.80 ANGSTROMS.
ATOM      1  N   ALA A   1      11.104   6.134  -6.504  1.00 20.00           N
ATOM      2  CA  ALA A   1      11.639   6.071  -5.147  1.00 21.50           C
ATOM      3  C   ALA A   1      13.159   5.872  -5.090  1.00 22.00           C
ATOM      4  O   ALA A   1      13.779   5.870  -6.163  1.00 50.00           O
ATOM      5  CB AALA A   1      11.245   7.341  -4.380  0.50 25.00           C
ATOM      6  CB BALA A   1      11.300   7.400  -4.300  0.50 26.00           C
ATOM      7  N   GLY A   2      13.750   5.700  -3.900  1.00 60.00           N
ATOM      8  CA  GLY A   2      15.200   5.500  -3.800  0.75 75.00           C
HETATM    9  O   HOH A 101       1.000   1.000   1.000  1.00 30.00           O
ATOM1    10  C   GLY A   2      15.200   5.500  -3.800  1.00 75.00           C
TER      11      GLY A   2
END
";

fn fixture(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".pdb").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn open_session() -> Session {
    let file = fixture(STRUCTURE);
    let records = PdbFile::read_from_path(file.path()).unwrap();
    Session::new(records, QueryConfigBuilder::new().build().unwrap())
}

fn run(session: &Session, line: &str) -> Vec<String> {
    session
        .handle_line(line)
        .expect("non-blank line")
        .report()
        .lines()
        .to_vec()
}

fn counts(lines: &[String]) -> usize {
    lines
        .iter()
        .map(|l| l.rsplit(':').next().unwrap().parse::<usize>().unwrap())
        .sum()
}

#[test]
fn only_plain_atom_records_are_loaded() {
    let session = open_session();
    assert_eq!(session.records().len(), 6);
    assert!(session.records().iter().all(|r| r.alt_loc.is_none()));
}

#[test]
fn frequency_counts_sum_to_record_count() {
    let session = open_session();
    let total = session.records().len();
    let atoms = run(&session, "atomfreq");
    assert_eq!(atoms, ["C:3", "N:2", "O:1"]);
    assert_eq!(counts(&atoms), total);
    let residues = run(&session, "resfreq");
    assert_eq!(residues, ["ALA:4", "GLY:2"]);
    assert_eq!(counts(&residues), total);
}

#[test]
fn reslength_over_a_parsed_file() {
    let session = open_session();
    let out = run(&session, "reslength ALA A 1");
    assert_eq!(out.len(), 1);
    assert!(out[0].starts_with("ALA with sequence number 1 in chain A has "));
    assert_eq!(run(&session, "reslength HOH A 101"), ["No residue present."]);
}

#[test]
fn tempcheck_buckets_cover_every_record() {
    let session = open_session();
    assert_eq!(
        run(&session, "tempcheck 50.00"),
        [
            "Temperature factor below 50.00: 3 / 6 (50.0%)",
            "Temperature factor at 50.00: 1 / 6 (16.7%)",
            "Temperature factor above 50.00: 2 / 6 (33.3%)",
        ]
    );
}

#[test]
fn session_survives_a_sequence_of_bad_commands() {
    let session = open_session();
    for line in ["foobar", "tempcheck 150", "tempcheck abc", "reslength AL A 5", "occupancy 2"] {
        let outcome = session.handle_line(line).unwrap();
        assert!(!outcome.is_quit(), "{line} should not end the session");
    }
    assert_eq!(session.records().len(), 6);
    assert!(session.handle_line("quit").unwrap().is_quit());
}

#[test]
fn malformed_record_aborts_the_whole_file() {
    let broken = STRUCTURE.replace("  13.159", "  13.1x9");
    let file = fixture(&broken);
    match PdbFile::read_from_path(file.path()) {
        Err(PdbError::Parse { line, .. }) => assert_eq!(line, 5),
        other => panic!("expected a parse error, got {other:?}"),
    }
}
