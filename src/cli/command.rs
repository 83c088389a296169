pub enum Command {
    /// Start the HTTP server.
    Serve {
        host: Option<String>,
        port: Option<u16>,
    },
    /// Upsert the sample records.
    Seed,
}
