mod events;
mod gateway;
mod portal;
