/// Shared fixtures for integration tests.
///
/// Builds a small expression table, FASTA file and static enrichment
/// directory inside a temporary directory that lives as long as the
/// returned [`TestData`].
use assert_cmd::Command;
use exprscope::bio::fasta::write_fasta;
use exprscope::bio::Sequence;
use std::path::PathBuf;
use tempfile::TempDir;

/// With x = wt_0min and y = wt_25min at threshold 2.0:
/// g_up and g_rise are significant, g_low fails the minimum sum,
/// g_off and g_none have no defined fold change.
pub const EXPRESSION_TABLE: &str = "AlternateID\tAnnotation\twt_25min\twt_0min\tdhog_0min\n\
g_up\tSensor histidine kinase\t2\t8\t1\n\
g_flat\tABC transporter permease\t3\t3\t3\n\
g_rise\tDNA gyrase subunit B\t12\t3\t4\n\
g_low\tHypothetical protein\t4\t1\t0\n\
g_off\tSerine/threonine KINASE\t0\t5\t\n\
g_none\tUncharacterized protein\t\tNA\t2\n";

pub const TOPGO_TABLE: &str = "GO.ID\tTerm\tAnnotated\tSignificant\tExpected\tclassicFisher\n\
1\tGO:0006412\ttranslation\t120\t40\t12.3\t< 1e-30\n\
2\tGO:0006811\tion transport\t80\t9\t8.2\t0.0100\n\
3\tGO:0009058\tbiosynthetic process\t300\t35\t30.7\t0.2400\n";

#[allow(dead_code)]
pub struct TestData {
    _dir: TempDir,
    pub data: PathBuf,
    pub fasta: PathBuf,
    pub static_dir: PathBuf,
}

#[allow(dead_code)]
pub fn setup() -> TestData {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let data = dir.path().join("input_data.csv");
    std::fs::write(&data, EXPRESSION_TABLE).expect("Failed to write expression table");

    let fasta = dir.path().join("protein_sequences.fasta");
    write_fasta(
        &fasta,
        &[
            Sequence::new("g_up".to_string(), b"MKVLAAGIVGLLAAQ".to_vec())
                .with_description("sensor kinase".to_string()),
            Sequence::new("g_rise".to_string(), b"MSNSYDSSSIKVLKG".to_vec()),
        ],
    )
    .expect("Failed to write FASTA");

    let static_dir = dir.path().join("static");
    std::fs::create_dir_all(&static_dir).expect("Failed to create static dir");
    std::fs::write(static_dir.join("topgo_dhog_0min.txt"), TOPGO_TABLE).unwrap();
    std::fs::write(static_dir.join("dhog_0min.png"), b"\x89PNG\r\n").unwrap();
    std::fs::write(static_dir.join("topgo_wt_0min.txt"), TOPGO_TABLE).unwrap();

    TestData {
        _dir: dir,
        data,
        fasta,
        static_dir,
    }
}

/// The `exprscope` binary with configuration and log overrides cleared.
#[allow(dead_code)]
pub fn exprscope_cmd() -> Command {
    let mut cmd = Command::cargo_bin("exprscope").unwrap();
    cmd.env_remove("EXPRSCOPE_CONFIG").env_remove("EXPRSCOPE_LOG");
    cmd
}
