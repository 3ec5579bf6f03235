use std::env;
use std::fs;
use std::path::Path;

const HEADER: &str = "x,y,month,cluster,monitoring_loc_id,analyte_primary_name";
const SOURCES: [&str; 2] = ["kmeans_observations", "spectral_observations"];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy each method's fixture to OUT_DIR for include_str. A missing or
    // headerless fixture is replaced by a header-only file so the app still
    // builds and shows "no data".
    for source in SOURCES {
        let src = format!("../fixtures/{}.csv", source);
        let src = Path::new(&src);
        let dest = Path::new(&out_dir).join(format!("{}.csv", source));

        let valid = src.exists()
            && csv::ReaderBuilder::new()
                .has_headers(true)
                .from_path(src)
                .and_then(|mut rdr| rdr.headers().cloned())
                .map(|headers| {
                    ["x", "y", "month", "cluster"]
                        .iter()
                        .all(|col| headers.iter().any(|h| h.trim() == *col))
                })
                .unwrap_or(false);

        if valid {
            fs::copy(src, &dest).unwrap();
        } else {
            println!("cargo:warning=fixture {} missing or invalid, embedding empty table", src.display());
            fs::write(&dest, format!("{}\n", HEADER)).unwrap();
        }
        println!("cargo:rerun-if-changed={}", src.display());
    }

    println!("cargo:rerun-if-changed=build.rs");
}
