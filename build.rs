fn main() {
    // Compile lalrpop grammar files (src/**/*.lalrpop into OUT_DIR)
    lalrpop::process_root().unwrap();

    println!("cargo:rerun-if-changed=src/expression/sop.lalrpop");
}
