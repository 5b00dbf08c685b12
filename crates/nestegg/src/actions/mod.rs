// Actions module - one handler per subcommand.

pub mod amortize;
pub mod init;
pub mod optimize;
pub mod sale;
pub mod superannuation;
