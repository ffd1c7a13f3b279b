mod road_mesh_test;
mod topology_test;
mod workflow_test;
