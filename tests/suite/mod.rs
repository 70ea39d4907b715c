mod assessment;
mod config;
mod diagram;
mod navigation;
