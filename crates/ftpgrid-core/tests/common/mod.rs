pub mod ftp_server;
