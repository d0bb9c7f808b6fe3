fn main() {
    depstage::app::cli::run();
}
