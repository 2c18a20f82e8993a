mod codec;
mod filtering;
mod projection;
