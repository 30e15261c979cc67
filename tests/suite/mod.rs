mod cli;
mod config;
mod effects;
mod facade;
mod predicates;
