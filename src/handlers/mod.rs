// handlers - HTTP surface
//
// Every route sits behind identify_caller_middleware, which injects a
// CurrentUser extension. Handlers decide what an anonymous caller gets.
//
//   /hotel/:hotel_id                 form page (owner or new listing)
//   /api/hotel/:hotel_id             server-side submission gate
//   /api/uploadthing/delete          storage delete proxy
//   /api/uploadthing/complete        upload attribution

pub mod hotel;
pub mod uploadthing;
