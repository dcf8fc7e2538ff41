fn main() -> anyhow::Result<()> {
    max_spl_lib::run()
}
