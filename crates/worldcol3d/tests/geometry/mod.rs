mod capsule_ground;
mod obstacle_triangles;
mod ray_ground;
mod sphere_box_queries;
mod worker_protocol;
