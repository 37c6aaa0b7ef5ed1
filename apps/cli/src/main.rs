fn main() -> anyhow::Result<()> {
    flashcard_cli::run()
}
