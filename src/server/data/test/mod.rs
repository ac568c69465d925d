mod favourite;
mod lookup;
mod occasion;
mod rating;
mod reservation;
mod user;
mod venue;
