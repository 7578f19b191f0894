pub mod ai;
pub mod architecture;
pub mod cat;
pub mod cd;
pub mod clear;
pub mod deploy;
pub mod echo;
pub mod enable;
pub mod exit;
pub mod experience;
pub mod file;
pub mod find;
pub mod grep;
pub mod head;
pub mod help;
pub mod history;
pub mod iot;
pub mod list;
pub mod ls;
pub mod mkdir;
pub mod ping;
pub mod pwd;
pub mod reset;
pub mod rm;
pub mod scan;
pub mod security;
pub mod show;
pub mod stack;
pub mod sudo;
pub mod system;
pub mod touch;
pub mod tree;
pub mod view;
pub mod wc;
pub mod whoami;
