mod assemblyai_backend_test;
