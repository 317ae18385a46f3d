mod chat;
mod controls;
mod fps;
mod panels;
mod profile;
